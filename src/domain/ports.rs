use crate::domain::model::OutputFormat;

pub trait ConfigProvider: Send + Sync {
    fn format(&self) -> OutputFormat;
    fn repeat(&self) -> usize;
    fn verbose(&self) -> bool;
}
