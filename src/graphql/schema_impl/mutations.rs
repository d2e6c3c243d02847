use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    graphql::helpers::find_session,
    models::{
        domain::LinkCategory,
        dto::{request::LinkRequest, response::CategoryView},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn accept_link(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        category: LinkCategory,
        url: String,
    ) -> Result<CategoryView> {
        let state = ctx.data::<AppState>()?;
        let shared = find_session(state, &session_id).await?;
        let mut session = shared.lock().await;

        state
            .curation_service
            .accept(&mut session, category, &LinkRequest { url })
            .map_err(|e| e.extend())?;

        Ok(CategoryView::new(category, session.curation(category)))
    }

    async fn reject_link(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        category: LinkCategory,
        url: String,
    ) -> Result<CategoryView> {
        let state = ctx.data::<AppState>()?;
        let shared = find_session(state, &session_id).await?;
        let mut session = shared.lock().await;

        state
            .curation_service
            .reject(&mut session, category, &LinkRequest { url })
            .map_err(|e| e.extend())?;

        Ok(CategoryView::new(category, session.curation(category)))
    }

    async fn add_link(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        category: LinkCategory,
        input: LinkRequest,
    ) -> Result<CategoryView> {
        let state = ctx.data::<AppState>()?;
        let shared = find_session(state, &session_id).await?;
        let mut session = shared.lock().await;

        state
            .curation_service
            .manual_add(&mut session, category, &input)
            .map_err(|e| e.extend())?;

        Ok(CategoryView::new(category, session.curation(category)))
    }

    async fn fetch_more_links(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        category: LinkCategory,
    ) -> Result<CategoryView> {
        let state = ctx.data::<AppState>()?;
        let shared = find_session(state, &session_id).await?;
        let mut session = shared.lock().await;

        state
            .curation_service
            .fetch_more(&mut session, category)
            .await
            .map_err(|e| e.extend())?;

        Ok(CategoryView::new(category, session.curation(category)))
    }
}
