mod a_arg_type_avtransportid;
mod a_arg_type_connectionid;
mod a_arg_type_connectionstatus;
mod a_arg_type_direction;
mod a_arg_type_protocolinfo;
mod a_arg_type_rcsid;
mod currentconnectionids;
mod sinkprotocolinfo;
mod sourceprotocolinfo;

pub use a_arg_type_avtransportid::A_ARG_TYPE_AVTRANSPORTID;
pub use a_arg_type_connectionid::A_ARG_TYPE_CONNECTIONID;
pub use a_arg_type_connectionstatus::A_ARG_TYPE_CONNECTIONSTATUS;
pub use a_arg_type_direction::A_ARG_TYPE_DIRECTION;
pub use a_arg_type_protocolinfo::A_ARG_TYPE_PROTOCOLINFO;
pub use a_arg_type_rcsid::A_ARG_TYPE_RCSID;
pub use currentconnectionids::CURRENTCONNECTIONIDS;
pub use sinkprotocolinfo::SINKPROTOCOLINFO;
pub use sourceprotocolinfo::SOURCEPROTOCOLINFO;
