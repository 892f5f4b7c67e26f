use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_COUNT: UI4 = "A_ARG_TYPE_Count"
}
