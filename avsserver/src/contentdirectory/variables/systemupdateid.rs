use avsupnp::define_variable;

define_variable! {
    pub static SYSTEMUPDATEID: UI4 = "SystemUpdateID" {
        default: 0,
        evented: true,
    }
}
