#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Browse,
    RootInput,
    ConfirmDelete,
    ResultDisplay,
    Notice,
    Help,
}
