use async_graphql::{Context, Object, Result, ID};

use crate::{app_state::AppState, graphql::helpers::find_session, models::dto::response::SessionView};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn session(&self, ctx: &Context<'_>, id: ID) -> Result<SessionView> {
        let state = ctx.data::<AppState>()?;
        let shared = find_session(state, &id).await?;
        let session = shared.lock().await;

        Ok(SessionView::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graphql::create_schema,
        test_utils::{fakes::fake_state, fixtures::session_with_candidates},
        models::domain::LinkCategory,
    };

    #[tokio::test]
    async fn session_query_returns_categories() {
        let state = fake_state();
        let session = session_with_candidates(&[(LinkCategory::Tender, &["https://t.ie"][..])]);
        let id = session.id;
        state.sessions.create(session).await.unwrap();
        let schema = create_schema(state);

        let query = format!(
            r#"{{ session(id: "{}") {{ productName categories {{ category query links {{ url accepted }} }} }} }}"#,
            id
        );
        let response = schema.execute(query.as_str()).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["session"]["productName"], "street lighting");
        assert_eq!(data["session"]["categories"][0]["category"], "TENDER");
        assert_eq!(
            data["session"]["categories"][0]["query"],
            "street lighting procurement tender"
        );
        assert_eq!(data["session"]["categories"][0]["links"][0]["url"], "https://t.ie");
        assert_eq!(data["session"]["categories"][3]["category"], "LITERATURE");
    }

    #[tokio::test]
    async fn malformed_id_reports_validation_code() {
        let schema = create_schema(fake_state());

        let response = schema
            .execute(r#"{ session(id: "nope") { productName } }"#)
            .await;
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unknown_session_reports_not_found_code() {
        let schema = create_schema(fake_state());

        let query = format!(
            r#"{{ session(id: "{}") {{ productName }} }}"#,
            uuid::Uuid::new_v4()
        );
        let response = schema.execute(query.as_str()).await;
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }
}
