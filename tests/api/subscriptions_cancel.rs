//! tests/api/subscriptions_cancel.rs

use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn you_must_be_logged_in_to_cancel_a_subscription() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.post_cancel("ursula_le_guin@gmail.com").await;

    // Assert
    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn cancelling_an_unknown_email_flashes_not_found() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.test_admin.login(&test_app).await;

    // Act - Part 1 - cancel an email nobody registered
    let response = test_app.post_cancel("unknown@x.com").await;

    // Assert
    assert_is_redirect_to(&response, "/admin/dashboard");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_admin_dashboard_html().await;
    assert!(html_page.contains("<p><i>Subscriber not found.</i></p>"));
}

#[tokio::test]
async fn cancelling_a_subscriber_removes_them_from_the_dashboard() {
    // Arrange
    let test_app = spawn_app().await;
    test_app
        .post_subscriptions("name=le%20guin&email=ursula_le_guin%40gmail.com".into())
        .await;
    test_app.test_admin.login(&test_app).await;
    assert_eq!(test_app.count_dashboard_rows().await, 1);

    // Act - Part 1 - cancel the subscription
    let response = test_app.post_cancel("ursula_le_guin@gmail.com").await;

    // Assert
    assert_is_redirect_to(&response, "/admin/dashboard");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_admin_dashboard_html().await;
    assert!(html_page.contains("ursula_le_guin@gmail.com is no longer subscribed."));
    assert_eq!(test_app.count_dashboard_rows().await, 0);
}

#[tokio::test]
async fn a_cancelled_email_can_subscribe_again() {
    // Arrange
    let test_app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";
    test_app.post_subscriptions(body.into()).await;
    test_app.test_admin.login(&test_app).await;
    test_app.post_cancel("ursula_le_guin@gmail.com").await;

    // Act
    let response = test_app.post_subscriptions(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "/subscriptions");
    let html_page = test_app.get_subscriptions_html().await;
    assert!(html_page.contains("You have successfully signed up for our newsletter!"));
    assert_eq!(test_app.count_dashboard_rows().await, 1);
}
