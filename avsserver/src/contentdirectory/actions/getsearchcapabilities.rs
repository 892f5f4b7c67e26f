use crate::contentdirectory::handlers;
use crate::contentdirectory::variables::SEARCHCAPABILITIES;
use avsupnp::define_action;

define_action! {
    pub static GETSEARCHCAPABILITIES = "GetSearchCapabilities" stateless {
        out "SearchCaps" => SEARCHCAPABILITIES,
    }
    with handler handlers::get_search_capabilities_handler()
}
