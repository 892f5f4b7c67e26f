use crate::connectionmanager::variables::CURRENTCONNECTIONIDS;
use avsupnp::define_action;

define_action! {
    pub static GETCURRENTCONNECTIONIDS = "GetCurrentConnectionIDs" stateless {
        out "ConnectionIDs" => CURRENTCONNECTIONIDS,
    }
}
