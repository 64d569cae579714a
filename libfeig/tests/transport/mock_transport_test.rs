use std::sync::Arc;

use libfeig::Error;
use libfeig::transport::{MockTransport, Transport};

#[tokio::test]
async fn usable_as_trait_object() {
    let mock = Arc::new(MockTransport::new());
    let transport: Arc<dyn Transport> = mock.clone();
    transport.open().await.unwrap();
    mock.push_frame(vec![0x02, 0x00, 0x07]);

    transport.write(&[0x02, 0x00, 0x07, 0xFF, 0x65]).await.unwrap();
    assert_eq!(transport.read(255).await.unwrap(), vec![0x02, 0x00, 0x07]);
    assert!(mock.is_open());
}

#[tokio::test]
async fn closed_mock_rejects_io() {
    let mock = MockTransport::new();
    mock.open().await.unwrap();
    mock.close().await.unwrap();
    assert!(!mock.is_open());
    assert!(matches!(mock.write(&[1]).await, Err(Error::ConnectionClosed)));
    assert!(matches!(mock.read(8).await, Err(Error::ConnectionClosed)));
}

#[tokio::test]
async fn wait_for_writes_returns_once_reached() {
    let mock = Arc::new(MockTransport::new());
    let writer = {
        let mock = mock.clone();
        tokio::spawn(async move {
            for b in 0..3u8 {
                mock.write(&[b]).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };
    mock.wait_for_writes(3).await;
    assert_eq!(mock.written(), vec![vec![0], vec![1], vec![2]]);
    writer.await.unwrap();
}
