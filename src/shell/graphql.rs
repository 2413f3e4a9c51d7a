use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::attendance::adapters::inbound::graphql::{
    AttendanceMutation, AttendanceQuery,
};
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AttendanceQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AttendanceMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
