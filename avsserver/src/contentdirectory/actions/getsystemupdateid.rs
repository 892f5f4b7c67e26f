use crate::contentdirectory::handlers;
use crate::contentdirectory::variables::SYSTEMUPDATEID;
use avsupnp::define_action;

define_action! {
    pub static GETSYSTEMUPDATEID = "GetSystemUpdateID" stateless {
        out "Id" => SYSTEMUPDATEID,
    }
    with handler handlers::get_system_update_id_handler()
}
