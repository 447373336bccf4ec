#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the executor to organize `path`, backing it up first if `is_backup`.
    OrganizeFiles {
        request_id: crate::RequestId,
        path: String,
        is_backup: bool,
    },
    /// Ask the executor to open the file-map configuration in an editor.
    OpenConfigFile { request_id: crate::RequestId },
}
