use worker::*;

pub mod config;
pub mod deploy;
pub mod dicts;
pub mod images;
pub mod json_ld;
pub mod models;
pub mod people;

use config::WorkerConfig;

#[event(fetch)]
pub async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    let router = Router::with_data(WorkerConfig::from_env(&env));

    router
        // health
        .get("/", |_, _| Response::ok("pourdavoud-site-worker online"))
        .get("/health", |_, _| {
            Response::from_json(&models::HealthResponse {
                service: "pourdavoud-site-worker".into(),
                status: "ok".into(),
            })
        })
        // deploy webhook
        .get("/api/deploy", |_, ctx| deploy::health(&ctx.data))
        .post_async("/api/deploy", |req, ctx| async move {
            deploy::receive(req, &ctx.data).await
        })
        // structured data
        .get("/api/schema/organization", |_, ctx| {
            let schema = json_ld::organization_structured_data(&ctx.data.site);
            Response::from_json(&models::StructuredData::from(schema))
        })
        .post_async("/api/schema/event", |mut req, ctx| async move {
            let event: models::EventRecord = req.json().await?;
            match json_ld::event_structured_data(&event, &ctx.data.images) {
                Ok(schema) => Response::from_json(&models::StructuredData::from(schema)),
                Err(err) => {
                    worker::console_log!("WARN: event schema skipped: {err}");
                    Ok(Response::from_json(&models::ErrorBody::new(err.to_string()))?
                        .with_status(422))
                }
            }
        })
        // people
        .post_async("/api/people/role", |mut req, ctx| async move {
            let person: models::PersonRecord = req.json().await?;
            let home = ctx.data.home_workspace_id.as_deref();
            if home.is_none() {
                worker::console_log!("WARN: HOME_WORKSPACE_ID unset; internal roles will not resolve");
            }
            Response::from_json(&models::RoleResponse {
                role: people::resolve_role(&person, home),
            })
        })
        .run(req, env)
        .await
}
