mod getcurrentconnectionids;
mod getcurrentconnectioninfo;
mod getprotocolinfo;

pub use getcurrentconnectionids::GETCURRENTCONNECTIONIDS;
pub use getcurrentconnectioninfo::GETCURRENTCONNECTIONINFO;
pub use getprotocolinfo::GETPROTOCOLINFO;
