use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_RCSID: I4 = "A_ARG_TYPE_RcsID"
}
