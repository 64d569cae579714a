#[path = "../common/mod.rs"]
mod common;

use libfeig::protocol::{FrameAccumulator, FrameCodec, ParseOutcome, ParseStatus};
use libfeig::test_support::response_frame;
use proptest::prelude::*;

#[test]
fn rf_on_frame_matches_capture() {
    let frame = FrameCodec::new().encode(0x6A, &[0x01]);
    assert_eq!(frame, vec![0x02, 0x00, 0x08, 0xFF, 0x6A, 0x01, 0xA1, 0xAA]);
}

#[test]
fn decode_whole_frame() {
    let frame = common::fixtures::system_information_frame();
    match FrameCodec::new().try_decode(&frame) {
        ParseOutcome::Success {
            response,
            frame_len,
        } => {
            assert_eq!(frame_len, frame.len());
            assert!(response.is_ok());
            assert_eq!(response.opcode(), 0xB0);
            assert_eq!(response.data(), &common::fixtures::system_information_data()[..]);
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn accumulator_yields_back_to_back_frames_from_one_chunk() {
    let mut chunk = response_frame(0x00, 0x65, &[0x03, 0x10]);
    chunk.extend(response_frame(0x01, 0xB0, &[]));
    chunk.extend_from_slice(&[0x02, 0x00]);

    let mut acc = FrameAccumulator::new(FrameCodec::new());
    let outcomes = acc.push(&chunk);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.status() == ParseStatus::Success));
    assert_eq!(acc.pending_bytes(), 2);
}

#[test]
fn accumulator_recovers_after_frame_error() {
    let mut acc = FrameAccumulator::new(FrameCodec::new());
    let outcomes = acc.push(&[0x55, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status(), ParseStatus::FrameError);
    assert_eq!(acc.pending_bytes(), 0);

    let outcomes = acc.push(&response_frame(0x00, 0x6A, &[]));
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status(), ParseStatus::Success);
}

#[test]
fn declared_length_below_minimum_is_frame_error() {
    let outcome = FrameCodec::new().try_decode(&[0x02, 0x00, 0x04, 0x00]);
    assert_eq!(outcome.status(), ParseStatus::FrameError);
}

fn any_frame() -> impl Strategy<Value = (u8, u8, Vec<u8>)> {
    (any::<u8>(), any::<u8>(), prop::collection::vec(any::<u8>(), 0..300))
}

proptest! {
    #[test]
    fn encode_declares_length_and_checksum((_, opcode, data) in any_frame()) {
        let frame = FrameCodec::new().encode(opcode, &data);
        prop_assert_eq!(frame.len(), data.len() + 7);
        let declared = u16::from_be_bytes([frame[1], frame[2]]) as usize;
        prop_assert_eq!(declared, frame.len());
        let body = &frame[..frame.len() - 2];
        let crc = libfeig::protocol::checksum::crc16(body).swap_bytes();
        prop_assert_eq!(&frame[frame.len() - 2..], &crc.to_be_bytes()[..]);
    }

    #[test]
    fn any_chunking_decodes_like_the_whole_frame(
        (status, opcode, data) in any_frame(),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let frame = response_frame(status, opcode, &data);
        let whole = FrameCodec::new().try_decode(&frame);

        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(frame.len())).collect();
        points.push(frame.len());
        points.sort_unstable();
        points.dedup();

        let mut acc = FrameAccumulator::new(FrameCodec::new());
        let mut start = 0;
        let mut terminal = Vec::new();
        for end in points {
            let outcomes = acc.push(&frame[start..end]);
            if end < frame.len() {
                prop_assert!(outcomes.is_empty());
            }
            terminal.extend(outcomes);
            start = end;
        }
        prop_assert_eq!(terminal, vec![whole]);
    }

    #[test]
    fn single_bit_flip_is_a_checksum_error(
        (status, opcode, data) in any_frame(),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut frame = response_frame(status, opcode, &data);
        // The length bytes move the frame boundary instead of the content.
        let idx = 3 + pos.index(frame.len() - 3);
        frame[idx] ^= 1 << bit;
        prop_assert_eq!(FrameCodec::new().try_decode(&frame).status(), ParseStatus::ChecksumError);
    }

    #[test]
    fn corrupt_start_marker_is_a_frame_error(
        (status, opcode, data) in any_frame(),
        marker in any::<u8>().prop_filter("not STX", |b| *b != 0x02),
    ) {
        let mut frame = response_frame(status, opcode, &data);
        frame[0] = marker;
        prop_assert_eq!(FrameCodec::new().try_decode(&frame).status(), ParseStatus::FrameError);
    }
}
