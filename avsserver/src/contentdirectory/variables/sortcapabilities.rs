use avsupnp::define_variable;

define_variable! {
    pub static SORTCAPABILITIES: String = "SortCapabilities" {
        evented: false,
    }
}
