mod local_attachment_store;

pub use local_attachment_store::LocalAttachmentStore;
