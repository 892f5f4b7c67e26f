use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_OBJECTID: String = "A_ARG_TYPE_ObjectID"
}
