use avsupnp::define_variable;

define_variable! {
    pub static SEARCHCAPABILITIES: String = "SearchCapabilities" {
        evented: false,
    }
}
