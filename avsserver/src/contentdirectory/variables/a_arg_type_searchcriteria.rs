use avsupnp::define_variable;

define_variable! {
    pub static A_ARG_TYPE_SEARCHCRITERIA: String = "A_ARG_TYPE_SearchCriteria"
}
