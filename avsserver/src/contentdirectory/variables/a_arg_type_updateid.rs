use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_UPDATEID: UI4 = "A_ARG_TYPE_UpdateID"
}
