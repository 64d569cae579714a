#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::fixtures::{inventory_frame, ok_frame, sample_uid, second_uid, status_frame};
use common::helpers::mock_reader;
use libfeig::protocol::{Command, Status};
use libfeig::test_support::response_frame;
use libfeig::transport::MockTransport;
use libfeig::{Error, ReaderBuilder, ReaderConfig};

#[tokio::test]
async fn connect_opens_the_transport() {
    let (mock, reader) = mock_reader().await;
    assert!(mock.is_open());
    assert_eq!(reader.id(), "usb");
    assert_eq!(reader.rx_buffer_size(), 280);

    reader.close().await.unwrap();
    assert!(!mock.is_open());
}

#[tokio::test]
async fn foreign_checksum_rejects_reader_frames() {
    let mock = Arc::new(MockTransport::new());
    mock.push_frame(ok_frame(0x6A));
    let reader = ReaderBuilder::new()
        .with_transport(mock.clone())
        .with_config(ReaderConfig::default().with_id("bench"))
        .with_checksum(|_: &[u8]| 0x0000u16)
        .connect()
        .await
        .unwrap();

    assert!(matches!(
        reader.rf_on().await,
        Err(Error::ChecksumMismatch { expected: 0, .. })
    ));
    assert_eq!(&mock.written()[0][6..], &[0x00, 0x00]);
    assert!(reader.is_idle());
}

#[tokio::test]
async fn reset_commands_use_their_opcodes() {
    let (mock, reader) = mock_reader().await;
    for opcode in [0x64, 0x63, 0x69] {
        mock.push_frame(ok_frame(opcode));
    }
    reader.system_reset().await.unwrap();
    reader.cpu_reset().await.unwrap();
    reader.rf_reset().await.unwrap();

    let opcodes: Vec<u8> = mock.written().iter().map(|f| f[4]).collect();
    assert_eq!(opcodes, vec![0x64, 0x63, 0x69]);
}

#[tokio::test]
async fn software_version_returns_payload() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(response_frame(0x00, 0x65, &[0x03, 0x0A, 0x00, 0x4C, 0x00]));
    let version = reader.get_software_version().await.unwrap();
    assert_eq!(version, vec![0x03, 0x0A, 0x00, 0x4C, 0x00]);
}

#[tokio::test]
async fn inventory_single_round() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(inventory_frame(0x00, &[sample_uid(), second_uid()]));
    let result = reader.inventory(false).await.unwrap();
    assert_eq!(result.status, Status::Ok);
    let uids: Vec<_> = result.records.iter().filter_map(|r| r.uid()).collect();
    assert_eq!(uids, vec![sample_uid(), second_uid()]);
}

#[tokio::test]
async fn inventory_all_with_no_tags() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x01, 0xB0));
    assert!(reader.inventory_all().await.unwrap().is_empty());
    assert_eq!(mock.write_count(), 1);
}

#[tokio::test]
async fn send_returns_non_ok_responses() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x80, 0x55));
    let resp = reader
        .send(&Command::Raw {
            opcode: 0x55,
            data: vec![],
        })
        .await
        .unwrap();
    assert_eq!(resp.status(), Status::UnknownCommand);
}

#[tokio::test]
async fn read_multiple_blocks_decodes_blocks() {
    let (mock, reader) = mock_reader().await;
    let content = common::fixtures::tag_content();
    mock.push_frame(common::fixtures::read_blocks_frame(4, &content[8..16]));

    let read = reader.read_multiple_blocks(&sample_uid(), 2, 2).await.unwrap();
    assert_eq!(read.data, &content[8..16]);
    assert_eq!(&mock.written()[0][15..17], &[2, 2]);
}

#[tokio::test]
async fn write_protected_block_reports_status() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x16, 0xB0));
    match reader
        .write_multiple_blocks(&sample_uid(), 0, 4, &[1, 2, 3, 4])
        .await
    {
        Err(e) => assert_eq!(e.device_status(), Some(Status::WriteProtect)),
        Ok(resp) => panic!("expected an error, got {:?}", resp),
    }
}
