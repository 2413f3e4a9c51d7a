use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    routing::{delete, get, post},
};

use crate::modules::attendance::adapters::inbound::http as attendance_http;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calendar", get(attendance_http::calendar))
        .route("/attendance/{date}", get(attendance_http::get_day))
        .route("/attendance/{date}/students", post(attendance_http::mark_status))
        .route(
            "/attendance/{date}/students/{student_id}",
            delete(attendance_http::remove_student),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
