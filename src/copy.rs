/// Hands out tickets for copy-button confirmations.
///
/// Every click that lands a clipboard write takes a new ticket and schedules a
/// restore timer holding it. Only the holder of the newest ticket may restore
/// the button, so a stale timer from an earlier click cannot cut a fresh
/// confirmation short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Confirmation {
    latest: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Confirmation {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Text to copy: the `data-copy` attribute, or empty when the button has none.
pub fn payload(attr: Option<String>) -> String {
    attr.unwrap_or_default()
}
