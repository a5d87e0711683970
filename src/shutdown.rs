/// Tracks the two conditions that gate closing the forwarding socket: the
/// input stream ending and a datagram send still being in flight.
///
/// The two events arrive from independent asynchronous sources, so either
/// may be observed first. Whichever transition sees both conditions
/// satisfied claims the release; after that the state is terminal and every
/// later transition reports that no release is due, so the socket can never
/// be closed twice or closed under an outstanding send.
#[derive(Debug, Default)]
pub struct SendState {
    input_ended: bool,
    send_in_flight: bool,
    released: bool,
}

impl SendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A line has been read and a send is about to be issued.
    pub fn line_read(&mut self) {
        self.send_in_flight = true;
    }

    /// The in-flight send finished, successfully or not. Returns true when
    /// the caller must release the transport now.
    pub fn send_completed(&mut self) -> bool {
        self.send_in_flight = false;
        self.try_release()
    }

    /// The input stream ended. Returns true when the caller must release
    /// the transport now.
    pub fn input_ended(&mut self) -> bool {
        self.input_ended = true;
        self.try_release()
    }

    fn try_release(&mut self) -> bool {
        if self.released || !self.input_ended || self.send_in_flight {
            return false;
        }
        self.released = true;
        true
    }
}
