use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Executes a GraphQL query or mutation against the shared schema.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground, pointed at `/api/v1/graphql`.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::schema::create_schema;
    use crate::store::{ActivityRepository, InMemoryActivityStore};
    use actix_web::{
        App,
        http::{StatusCode, header::ContentType},
        test,
    };
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_graphql_handler_signup_then_list() {
        let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityStore::seeded());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_schema(repo)))
                .route("/graphql", web::post().to(graphql_handler)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": "mutation($a: String!, $e: String!) { signup(activity: $a, email: $e) }",
                "variables": { "a": "Art Studio", "e": "student1@mergington.edu" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["signup"],
            "Signed up student1@mergington.edu for Art Studio"
        );

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": r#"{ activity(name: "Art Studio") { participants } }"#
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        let participants = body["data"]["activity"]["participants"].as_array().unwrap();
        assert!(participants.contains(&json!("student1@mergington.edu")));
    }

    #[actix_web::test]
    async fn test_graphql_handler_invalid_query() {
        let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityStore::seeded());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_schema(repo)))
                .route("/graphql", web::post().to(graphql_handler)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({ "query": "query { invalid_field }" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // GraphQL still returns 200 with errors
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_graphql_playground() {
        let app = test::init_service(
            App::new().route("/playground", web::get().to(graphql_playground)),
        )
        .await;

        let req = test::TestRequest::get().uri("/playground").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap().to_str().unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("GraphQL Playground"));
        assert!(body.contains("/api/v1/graphql"));
    }
}
