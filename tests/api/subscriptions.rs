//! tests/api/subscriptions.rs

use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn you_must_set_a_valid_email_to_subscribe() {
    // Arrange
    let test_app = spawn_app().await;
    // all email parsing errors surface the same user-facing message,
    // therefore we check here only some practical failure modes
    let test_cases = vec![
        ("name=le%20guin", "missing the email"),
        ("name=Ursula&email=", "empty email"),
        ("name=Ursula&email=definitely-not-an-email", "invalid email"),
        ("name=Ursula&email=a%40b", "domain without a dot"),
        ("name=Ursula&email=a%20b%40c.d", "embedded whitespace"),
    ];

    for (invalid_body, test_failing_message) in test_cases {
        // Act - Part 1 - post subscription
        let response = test_app.post_subscriptions(invalid_body.into()).await;

        // Assert
        assert_is_redirect_to(&response, "/subscriptions");

        // Act - Part 2 - Follow the redirect
        let html_page = test_app.get_subscriptions_html().await;

        // Assert
        assert!(
            html_page.contains("<p><i>Invalid email format.</i></p>"),
            // Additional customized error message on test failure
            "The API did not react with correct html response when payload was {}.",
            test_failing_message
        );
    }
}

#[tokio::test]
async fn you_must_set_a_valid_name_to_subscribe() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("name=&email=ursula_le_guin%40gmail.com", "empty name"),
        ("email=ursula_le_guin%40gmail.com", "missing the name"),
        ("", "missing both name and email"),
    ];

    for (invalid_body, test_failing_message) in test_cases {
        // Act - Part 1 - post subscription
        let response = test_app.post_subscriptions(invalid_body.into()).await;

        // Assert
        assert_is_redirect_to(&response, "/subscriptions");

        // Act - Part 2 - Follow the redirect
        let html_page = test_app.get_subscriptions_html().await;

        // Assert
        assert!(
            html_page.contains("<p><i>`` is not a valid subscriber name.</i></p>"),
            "The API did not react with correct html response when payload was {}.",
            test_failing_message
        );
    }
}

#[tokio::test]
async fn subscribing_with_valid_form_data_flashes_a_confirmation() {
    // Arrange
    let test_app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    // Act - Part 1 - post subscription
    let response = test_app.post_subscriptions(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "/subscriptions");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_subscriptions_html().await;

    // Assert
    assert!(html_page.contains("You have successfully signed up for our newsletter!"));
}

#[tokio::test]
async fn subscribing_persists_the_new_subscriber() {
    // Arrange
    let test_app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    // Act
    test_app.post_subscriptions(body.into()).await;

    // Assert - the subscriber shows up on the admin dashboard
    let response = test_app.test_admin.login(&test_app).await;
    assert_is_redirect_to(&response, "/admin/dashboard");
    let html_page = test_app.get_admin_dashboard_html().await;
    assert!(html_page.contains("le guin"));
    assert!(html_page.contains("ursula_le_guin@gmail.com"));
}

#[tokio::test]
async fn subscribing_twice_with_the_same_email_flashes_a_conflict() {
    // Arrange
    let test_app = spawn_app().await;
    let body = "name=le%20guin&email=ursula_le_guin%40gmail.com";

    // Act - Part 1 - subscribe twice
    test_app.post_subscriptions(body.into()).await;
    let response = test_app.post_subscriptions(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "/subscriptions");

    // Act - Part 2 - Follow the redirect
    let html_page = test_app.get_subscriptions_html().await;

    // Assert
    assert!(html_page.contains("<p><i>This email is already registered.</i></p>"));

    // Assert - only one record made it into the store
    test_app.test_admin.login(&test_app).await;
    assert_eq!(test_app.count_dashboard_rows().await, 1);
}

#[tokio::test]
async fn a_subscriber_with_a_different_email_is_not_a_duplicate() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    test_app
        .post_subscriptions("name=le%20guin&email=ursula_le_guin%40gmail.com".into())
        .await;
    let response = test_app
        .post_subscriptions("name=Genly%20Ai&email=genly%40winter.hain".into())
        .await;

    // Assert
    assert_is_redirect_to(&response, "/subscriptions");
    test_app.test_admin.login(&test_app).await;
    assert_eq!(test_app.count_dashboard_rows().await, 2);
}
