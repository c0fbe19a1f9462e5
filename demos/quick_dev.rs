
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    let req_add_user = hc.do_post(
        "/users",
        json!({
            "userName": "Wong",
            "age": "25"
        }),
    );
    req_add_user.await?.print().await?;

    hc.do_post("/users", json!({ "userName": "Wong" })).await?.print().await?;
    hc.do_get("/users").await?.print().await?;

    hc.do_post("/requests", json!({ "hello": "world" })).await?.print().await?;
    hc.do_get("/api/GetRequest").await?.print().await?;

    Ok(())
}
