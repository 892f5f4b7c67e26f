use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_INDEX: UI4 = "A_ARG_TYPE_Index"
}
