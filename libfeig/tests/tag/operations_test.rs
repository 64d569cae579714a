#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{
    inventory_frame, ok_frame, read_blocks_frame, sample_uid, second_uid, status_frame,
    system_information_frame, tag_content,
};
use common::helpers::{decode_write_request, mock_reader};
use libfeig::protocol::Status;
use libfeig::tag::{erase_tag, read_tag, read_tags, write_tag, write_tag_with_afi};
use libfeig::{Error, TransponderType};

#[tokio::test]
async fn read_tag_collects_all_blocks() {
    let (mock, reader) = mock_reader().await;
    let content = tag_content();
    mock.push_frame(system_information_frame());
    mock.push_frame(read_blocks_frame(4, &content));

    let tag = read_tag(&reader, &sample_uid()).await.unwrap();
    assert_eq!(tag.block_size, Some(4));
    assert_eq!(tag.block_count, Some(80));
    assert_eq!(tag.afi, Some(1));
    assert_eq!(tag.memory_size(), Some(320));
    assert_eq!(tag.data, content);
    assert_eq!(tag.security_status.len(), 80);

    let read_request = &mock.written()[1];
    assert_eq!(&read_request[15..17], &[0, 80]);
}

#[tokio::test]
async fn read_tags_keeps_going_after_a_failed_tag() {
    let (mock, reader) = mock_reader().await;
    let content = tag_content();
    mock.push_frame(inventory_frame(0x00, &[sample_uid(), second_uid()]));
    // first tag: system information fails
    mock.push_frame(status_frame(0x01, 0xB0));
    // second tag reads fine
    mock.push_frame(system_information_frame());
    mock.push_frame(read_blocks_frame(4, &content));

    let readings = read_tags(&reader).await.unwrap();
    assert_eq!(readings.len(), 2);

    match readings[0].error() {
        Some(e) => assert_eq!(e.device_status(), Some(Status::NoTransponder)),
        None => panic!("first tag should have failed"),
    }
    let tag = readings[1].tag().unwrap();
    assert_eq!(tag.transponder_type, TransponderType::Iso15693);
    assert_eq!(tag.data, content);
    assert!(reader.is_idle());
}

#[tokio::test]
async fn read_tags_fails_when_inventory_fails() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x83, 0xB0));
    assert!(matches!(
        read_tags(&reader).await,
        Err(Error::DeviceStatus { .. })
    ));
}

#[tokio::test]
async fn partial_write_keeps_completed_responses() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(ok_frame(0xB0));
    mock.push_frame(status_frame(0x03, 0xB0));

    let data = vec![0x5A; 300];
    match write_tag(&reader, &sample_uid(), 0, &data, 4).await {
        Err(Error::PartialWrite { completed, source }) => {
            assert_eq!(completed.len(), 1);
            assert_eq!(source.device_status(), Some(Status::WriteError));
        }
        other => panic!("expected PartialWrite, got {:?}", other),
    }
    // no third request after the failure
    assert_eq!(mock.write_count(), 2);
}

#[tokio::test]
async fn single_request_failure_is_the_plain_error() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x16, 0xB0));
    match write_tag(&reader, &sample_uid(), 4, &[1, 2, 3, 4], 4).await {
        Err(Error::DeviceStatus { status, .. }) => assert_eq!(status, Status::WriteProtect),
        other => panic!("expected DeviceStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn write_with_afi_continues_after_rejected_afi() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(status_frame(0x16, 0xB0));
    mock.push_frame(ok_frame(0xB0));

    let report = write_tag_with_afi(&reader, &sample_uid(), 0x42, 0, b"hello", 4)
        .await
        .unwrap();
    assert_eq!(report.afi, None);
    assert_eq!(report.data, b"hello\0\0\0".to_vec());

    let written = mock.written();
    assert_eq!(written[0][5], 0x27);
    let (first, count, data) = decode_write_request(&written[1]);
    assert_eq!((first, count), (0, 2));
    assert_eq!(data, b"hello\0\0\0".to_vec());
}

#[tokio::test]
async fn write_with_afi_reports_written_afi() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(ok_frame(0xB0));
    mock.push_frame(ok_frame(0xB0));
    let report = write_tag_with_afi(&reader, &sample_uid(), 7, 0, &[1], 4)
        .await
        .unwrap();
    assert_eq!(report.afi, Some(7));
    assert_eq!(report.responses.len(), 1);
}

#[tokio::test]
async fn erase_zeroes_the_whole_tag() {
    let (mock, reader) = mock_reader().await;
    mock.push_frame(system_information_frame());
    mock.push_frame(ok_frame(0xB0));
    mock.push_frame(ok_frame(0xB0));

    let report = erase_tag(&reader, &sample_uid(), None, 8).await.unwrap();
    assert_eq!(report.data, vec![0u8; 320]);

    let mut joined = Vec::new();
    for frame in &mock.written()[1..] {
        let (_, _, data) = decode_write_request(frame);
        joined.extend(data);
    }
    assert_eq!(joined, vec![0u8; 320]);
}
