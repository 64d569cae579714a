// libfeig/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoint addresses of a reader and the interface that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub interface: u8,
    pub bulk_in: u8,
    pub bulk_out: u8,
}

/// Endpoints used when the descriptors do not list bulk endpoints.
pub const FALLBACK_ENDPOINTS: Endpoints = Endpoints {
    interface: 0,
    bulk_in: 0x81,
    bulk_out: 0x02,
};

/// Inspect the active configuration and return the first bulk IN and OUT
/// endpoints found, falling back to [`FALLBACK_ENDPOINTS`].
pub fn find_endpoints<C: UsbContext>(device: &Device<C>) -> Endpoints {
    let Ok(config) = device.config_descriptor(0) else {
        return FALLBACK_ENDPOINTS;
    };

    let mut found = FALLBACK_ENDPOINTS;
    let mut in_ep = None;
    let mut out_ep = None;
    for interface in config.interfaces() {
        for desc in interface.descriptors() {
            for ep in desc.endpoint_descriptors() {
                if ep.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match ep.direction() {
                    Direction::In if in_ep.is_none() => {
                        in_ep = Some(ep.address());
                        found.interface = desc.interface_number();
                    }
                    Direction::Out if out_ep.is_none() => {
                        out_ep = Some(ep.address());
                        found.interface = desc.interface_number();
                    }
                    _ => {}
                }
            }
        }
    }
    found.bulk_in = in_ep.unwrap_or(FALLBACK_ENDPOINTS.bulk_in);
    found.bulk_out = out_ep.unwrap_or(FALLBACK_ENDPOINTS.bulk_out);
    found
}
