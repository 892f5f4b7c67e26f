use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_AVTRANSPORTID: I4 = "A_ARG_TYPE_AVTransportID"
}
