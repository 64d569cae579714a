use libfeig::Uid;
use libfeig::protocol::codec::encode_command_frame;
use libfeig::protocol::{Command, FrameCodec};

fn uid() -> Uid {
    "e004010809b9cb12".parse().unwrap()
}

fn frame(cmd: Command) -> Vec<u8> {
    encode_command_frame(&FrameCodec::new(), &cmd).unwrap()
}

#[test]
fn system_information_request_matches_capture() {
    let bytes = frame(Command::GetSystemInformation { uid: uid() });
    assert_eq!(
        hex::encode(bytes),
        "020011ffb02b01e004010809b9cb120b65"
    );
}

#[test]
fn inventory_request_modes() {
    assert_eq!(&frame(Command::Inventory { more_data: false })[4..7], &[0xB0, 0x01, 0x00]);
    assert_eq!(&frame(Command::Inventory { more_data: true })[4..7], &[0xB0, 0x01, 0x01]);
}

#[test]
fn read_multiple_blocks_request_layout() {
    let bytes = frame(Command::ReadMultipleBlocks {
        uid: uid(),
        first_block: 5,
        block_count: 10,
    });
    assert_eq!(bytes.len(), 19);
    assert_eq!(&bytes[4..7], &[0xB0, 0x23, 0x09]);
    assert_eq!(&bytes[7..15], uid().as_bytes());
    assert_eq!(&bytes[15..17], &[5, 10]);
}

#[test]
fn write_multiple_blocks_reverses_each_block() {
    let bytes = frame(Command::WriteMultipleBlocks {
        uid: uid(),
        first_block: 2,
        block_size: 4,
        data: vec![1, 2, 3, 4, 5, 6],
    });
    assert_eq!(bytes.len(), 20 + 8);
    assert_eq!(&bytes[4..7], &[0xB0, 0x24, 0x01]);
    assert_eq!(&bytes[15..18], &[2, 2, 4]);
    assert_eq!(&bytes[18..26], &[4, 3, 2, 1, 0, 0, 6, 5]);
}

#[test]
fn write_afi_request_layout() {
    let bytes = frame(Command::WriteAfi { uid: uid(), afi: 0x42 });
    assert_eq!(&bytes[4..7], &[0xB0, 0x27, 0x01]);
    assert_eq!(bytes[15], 0x42);
}

#[test]
fn oversized_payload_is_rejected() {
    let cmd = Command::Raw {
        opcode: 0x81,
        data: vec![0; 0xFFFF],
    };
    assert!(matches!(
        encode_command_frame(&FrameCodec::new(), &cmd),
        Err(libfeig::Error::InvalidArgument(_))
    ));
}
