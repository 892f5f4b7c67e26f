use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_RESULT: String = "A_ARG_TYPE_Result"
}
