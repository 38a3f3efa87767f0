use leftover_chef::{ChefClient, LocalStorage, Page, RecipeForm, TerminalPage};
use tempfile::TempDir;

async fn load_into(server_url: String, page: &mut TerminalPage) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = LocalStorage::open(dir.path().join("storage.json"))
        .await
        .unwrap();
    let client = ChefClient::new(server_url, None).unwrap();

    RecipeForm::new(&client, &mut storage, "recipe.html")
        .load(page)
        .await;
    dir
}

#[tokio::test]
async fn test_food_saved_is_rounded_to_one_decimal() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/food-saved")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("42.567")
        .create_async()
        .await;

    let mut page = TerminalPage::new();
    let _dir = load_into(server.url(), &mut page).await;

    assert_eq!(page.food_saved(), "42.6");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_integer_food_saved_gets_a_decimal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/food-saved")
        .with_status(200)
        .with_body("17")
        .create_async()
        .await;

    let mut page = TerminalPage::new();
    let _dir = load_into(server.url(), &mut page).await;

    assert_eq!(page.food_saved(), "17.0");
}

#[tokio::test]
async fn test_failures_leave_display_unchanged() {
    for (status, body) in [(200, "not json"), (200, r#"{"pounds": 3}"#), (503, "")] {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/food-saved")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;

        let mut page = TerminalPage::new();
        page.set_food_saved("8.8");
        let _dir = load_into(server.url(), &mut page).await;

        assert_eq!(page.food_saved(), "8.8");
        assert_eq!(page.location(), None);
    }
}
