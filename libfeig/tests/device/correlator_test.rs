#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use libfeig::Error;
use libfeig::device::{Correlator, ReaderConfig};
use libfeig::protocol::FrameCodec;
use libfeig::test_support::{self, response_frame};
use libfeig::transport::MockTransport;

async fn start(mock: &Arc<MockTransport>, timeout: Option<Duration>) -> Correlator {
    use libfeig::transport::Transport;
    mock.open().await.unwrap();
    Correlator::start(mock.clone(), FrameCodec::new(), 255, timeout)
}

#[tokio::test]
async fn second_send_is_busy_and_first_still_resolves() {
    let mock = Arc::new(MockTransport::new());
    // First write goes unanswered until the frame is injected below.
    mock.push_reply(vec![]);
    let correlator = Arc::new(start(&mock, None).await);

    let first = {
        let c = correlator.clone();
        tokio::spawn(async move { c.send(0x65, &[]).await })
    };
    mock.wait_for_writes(1).await;
    assert!(!correlator.is_idle());

    assert!(matches!(correlator.send(0x6A, &[0x01]).await, Err(Error::Busy)));
    assert_eq!(mock.write_count(), 1);

    mock.push_chunk(response_frame(0x00, 0x65, &[0x03, 0x01]));
    let resp = first.await.unwrap().unwrap();
    assert_eq!(resp.opcode(), 0x65);
    assert_eq!(resp.data(), &[0x03, 0x01]);
    assert!(correlator.is_idle());
}

#[tokio::test]
async fn response_split_byte_by_byte() {
    let mock = Arc::new(MockTransport::new());
    let frame = common::fixtures::system_information_frame();
    mock.push_reply(frame.iter().map(|b| vec![*b]).collect());
    let correlator = start(&mock, None).await;

    let resp = correlator.send(0xB0, &[0x2B, 0x01]).await.unwrap();
    assert_eq!(resp.data(), &common::fixtures::system_information_data()[..]);
}

#[tokio::test]
async fn timeout_releases_the_slot() {
    let mock = Arc::new(MockTransport::new());
    mock.push_reply(vec![]);
    mock.push_frame(response_frame(0x00, 0x6A, &[]));
    let correlator = start(&mock, Some(Duration::from_millis(20))).await;

    assert!(matches!(correlator.send(0x65, &[]).await, Err(Error::Timeout)));
    assert!(correlator.is_idle());
    assert!(correlator.send(0x6A, &[0x00]).await.is_ok());
}

#[tokio::test]
async fn disconnect_fails_pending_and_later_sends() {
    let (mock, reader) = test_support::mock_reader(ReaderConfig::default())
        .await
        .unwrap();
    let reader = Arc::new(reader);
    mock.push_reply(vec![]);

    let pending = {
        let reader = reader.clone();
        tokio::spawn(async move { reader.get_software_version().await })
    };
    mock.wait_for_writes(1).await;
    mock.disconnect();

    assert!(matches!(
        pending.await.unwrap(),
        Err(Error::ConnectionClosed)
    ));
    assert!(matches!(
        reader.rf_on().await,
        Err(Error::ConnectionClosed)
    ));
}

#[tokio::test]
async fn reply_arriving_after_timeout_goes_nowhere() {
    let config = ReaderConfig::default().with_exchange_timeout(Duration::from_millis(50));
    let (mock, reader) = test_support::mock_reader(config).await.unwrap();
    mock.push_reply(vec![]);
    mock.push_reply(vec![
        response_frame(0x00, 0x65, &[0x03, 0x01]),
        response_frame(0x00, 0x6A, &[]),
    ]);

    assert!(matches!(
        reader.get_software_version().await,
        Err(Error::Timeout)
    ));
    let resp = reader
        .send(&libfeig::protocol::Command::RfOutput { on: true })
        .await
        .unwrap();
    assert_eq!(resp.opcode(), 0x6A);
    assert!(resp.data().is_empty());
}
