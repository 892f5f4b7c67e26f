mod a_arg_type_browseflag;
mod a_arg_type_count;
mod a_arg_type_filter;
mod a_arg_type_index;
mod a_arg_type_objectid;
mod a_arg_type_result;
mod a_arg_type_searchcriteria;
mod a_arg_type_sortcriteria;
mod a_arg_type_updateid;
mod containerupdateids;
mod searchcapabilities;
mod sortcapabilities;
mod systemupdateid;

pub use a_arg_type_browseflag::A_ARG_TYPE_BROWSEFLAG;
pub use a_arg_type_count::A_ARG_TYPE_COUNT;
pub use a_arg_type_filter::A_ARG_TYPE_FILTER;
pub use a_arg_type_index::A_ARG_TYPE_INDEX;
pub use a_arg_type_objectid::A_ARG_TYPE_OBJECTID;
pub use a_arg_type_result::A_ARG_TYPE_RESULT;
pub use a_arg_type_searchcriteria::A_ARG_TYPE_SEARCHCRITERIA;
pub use a_arg_type_sortcriteria::A_ARG_TYPE_SORTCRITERIA;
pub use a_arg_type_updateid::A_ARG_TYPE_UPDATEID;
pub use containerupdateids::CONTAINERUPDATEIDS;
pub use searchcapabilities::SEARCHCAPABILITIES;
pub use sortcapabilities::SORTCAPABILITIES;
pub use systemupdateid::SYSTEMUPDATEID;
