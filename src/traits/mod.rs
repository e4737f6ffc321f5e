pub mod clock;
pub mod random;
pub mod relay;
pub mod usage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::RandomSource;
pub use relay::{AiRelay, RelayRequest, RelayResponse};
pub use usage::UsageCounter;
