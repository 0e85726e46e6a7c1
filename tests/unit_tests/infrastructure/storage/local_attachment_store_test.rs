use bytes::Bytes;
use tempfile::TempDir;

use medvoice::application::ports::{AttachmentStore, AttachmentStoreError};
use medvoice::domain::{Attachment, AttachmentKind};
use medvoice::infrastructure::storage::LocalAttachmentStore;

#[tokio::test]
async fn given_upload_when_staged_then_can_be_read_back() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let attachment = store
        .put("cough.mp3", Bytes::from_static(b"mp3 bytes"))
        .await
        .unwrap();

    assert_eq!(attachment.file_name, "cough.mp3");
    assert_eq!(attachment.kind(), AttachmentKind::Audio);
    assert_eq!(store.read(&attachment).await.unwrap(), b"mp3 bytes");
}

#[tokio::test]
async fn given_same_file_name_twice_when_staging_then_keys_differ() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let first = store.put("scan.png", Bytes::from_static(b"1")).await.unwrap();
    let second = store.put("scan.png", Bytes::from_static(b"2")).await.unwrap();

    assert_ne!(first.key, second.key);
    assert_eq!(store.read(&first).await.unwrap(), b"1");
    assert_eq!(store.read(&second).await.unwrap(), b"2");
}

#[tokio::test]
async fn given_path_like_file_name_when_staging_then_directories_are_stripped() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let attachment = store
        .put("../../etc/my scan.jpg", Bytes::from_static(b"jpg"))
        .await
        .unwrap();

    assert_eq!(attachment.file_name, "my_scan.jpg");
    assert_eq!(attachment.kind(), AttachmentKind::Image);
}

#[tokio::test]
async fn given_unknown_key_when_reading_then_not_found() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let result = store
        .read(&Attachment::new("missing/voice.wav", "voice.wav"))
        .await;

    assert!(matches!(result, Err(AttachmentStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_staged_upload_when_removed_then_no_file_is_left_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let attachment = store
        .put("rash.png", Bytes::from_static(b"png bytes"))
        .await
        .unwrap();
    store.remove(&attachment).await.unwrap();

    let left = std::fs::read_dir(dir.path().join(attachment.key.split('/').next().unwrap()))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(left, 0);
    assert!(matches!(
        store.read(&attachment).await,
        Err(AttachmentStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_missing_upload_when_removed_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let store = LocalAttachmentStore::new(dir.path().to_path_buf()).unwrap();

    let result = store.remove(&Attachment::new("nope/ghost.wav", "ghost.wav")).await;

    assert!(result.is_ok());
}
