pub(crate) mod flow_context;

pub(crate) use flow_context::FlowContext;
