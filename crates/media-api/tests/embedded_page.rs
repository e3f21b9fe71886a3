//! Behaviour of the page-embedded resource cache against a realistic page.

use media_api::embedded::PageContext;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Latest media</title></head>
<body>
  <form method="post">
    <input type="hidden" name="csrfmiddlewaretoken" value="tok-f00d">
  </form>
  <script type="application/resource+json">
    {"id": "m1", "title": "Lecture 1", "description": "Intro",
     "posterImageUrl": "https://cdn.invalid/m1.jpg"}
  </script>
  <script type="application/resource+json">
    {"id": "c9", "title": "Engineering lectures", "description": "",
     "mediaUrl": "https://media.test/api/media/?channel=c9"}
  </script>
  <script type="application/resource+json">
    {"title": "no id, must be skipped"}
  </script>
  <script type="application/resource+json">
    not json at all
  </script>
  <script type="application/profile+json">
    {"isAnonymous": false, "username": "spqr1", "displayName": "S. P. Q. R.",
     "channels": [{"id": "c9", "title": "Engineering lectures"}]}
  </script>
  <script type="text/javascript">window.onload = function() {};</script>
</body>
</html>"#;

#[test]
fn test_csrf_token_extracted() {
    let context = PageContext::parse(PAGE);
    assert_eq!(context.csrf_token(), "tok-f00d");
}

#[test]
fn test_resources_are_take_once() {
    let context = PageContext::parse(PAGE);
    assert_eq!(context.resource_count(), 2);

    let first = context.take_resource("m1").expect("embedded resource");
    assert_eq!(first["title"], "Lecture 1");

    // The immediately following lookup must miss, forcing network fallback.
    assert!(context.take_resource("m1").is_none());
    assert_eq!(context.resource_count(), 1);

    // Taking one id leaves the others untouched.
    assert!(context.take_resource("c9").is_some());
}

#[test]
fn test_profile_is_reusable() {
    let context = PageContext::parse(PAGE);

    let first = context.profile().expect("embedded profile");
    assert_eq!(first.username.as_deref(), Some("spqr1"));
    assert!(!first.is_anonymous);

    // Unlike resources, the profile is served again and again.
    let second = context.profile().expect("profile still present");
    assert_eq!(second.username.as_deref(), Some("spqr1"));
    assert_eq!(second.channels.len(), 1);
}

#[test]
fn test_malformed_payloads_are_skipped() {
    // The id-less and non-JSON payloads in PAGE must not break the scan or
    // end up in the table.
    let context = PageContext::parse(PAGE);
    assert_eq!(context.resource_count(), 2);
}

#[test]
fn test_page_without_embeds() {
    let context = PageContext::parse("<html><body><p>plain page</p></body></html>");
    assert_eq!(context.csrf_token(), "");
    assert!(context.profile().is_none());
    assert_eq!(context.resource_count(), 0);
}
