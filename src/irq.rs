//! Deferred handoff between a DIO0 interrupt handler and the context that
//! owns the SPI bus.
//!
//! The chip raises its DIO0 line on a completed reception. Reading the
//! IRQ flags or the FIFO from inside an interrupt handler would race any
//! in-progress bus burst on the main context, so the handler must only
//! record that the event happened and return.

use core::sync::atomic::{AtomicBool, Ordering};

/// A single-producer/single-consumer "packet ready" latch.
///
/// The DIO0 rising-edge handler calls [`PacketReady::signal()`]; the context
/// that owns the bus calls [`PacketReady::take()`] and then performs the
/// actual [`available()`](crate::radio::Sx127x::available) /
/// [`read()`](crate::radio::Sx127x::read) register traffic.
///
/// ```rust,ignore
/// static PACKET_READY: PacketReady = PacketReady::new();
///
/// // in the DIO0 interrupt handler:
/// PACKET_READY.signal();
///
/// // in the main loop:
/// if PACKET_READY.take() && radio.available()? {
///     let len = radio.read(&mut buf)?;
/// }
/// ```
pub struct PacketReady {
    ready: AtomicBool,
}

impl PacketReady {
    /// Create an unsignaled latch. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Record a completed reception. Safe to call from interrupt context;
    /// never touches the bus.
    pub fn signal(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Consume a pending notification, returning `true` if one was pending.
    pub fn take(&self) -> bool {
        self.ready.swap(false, Ordering::AcqRel)
    }

    /// Peek at the latch without consuming it.
    pub fn is_signaled(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl Default for PacketReady {
    fn default() -> Self {
        Self::new()
    }
}
