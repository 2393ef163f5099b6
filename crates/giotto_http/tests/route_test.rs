use giotto_http::{routes, CompiledRoute, Method, Route};

#[test]
fn test_route_key_includes_method_and_template() {
    assert_eq!(
        routes::POST_CHANNEL_MESSAGES.key(),
        "POST /channels/{channel}/messages"
    );
    assert_eq!(routes::GET_GATEWAY_BOT.key(), "GET /gateway/bot");
}

#[test]
fn test_compile_renders_params_in_template_order() {
    let compiled = routes::DELETE_CHANNEL_MESSAGE.compile(&[&123u64, &456u64]);
    assert_eq!(compiled.path, "/channels/123/messages/456");
    assert_eq!(compiled.method, Method::Delete);
    assert_eq!(compiled.route_key, "DELETE /channels/{channel}/messages/{message}");
}

#[test]
fn test_first_param_is_the_major_param() {
    let compiled = routes::GET_GUILD_MEMBER.compile(&[&99u64, &7u64]);
    assert_eq!(compiled.major, "99");
}

#[test]
fn test_routes_without_placeholders_have_no_major_param() {
    let compiled = routes::GET_GATEWAY.compile(&[]);
    assert_eq!(compiled.path, "/gateway");
    assert_eq!(compiled.major, "-");
}

#[test]
fn test_same_template_different_major_values_share_a_route_key() {
    let a = routes::POST_CHANNEL_MESSAGES.compile(&[&1u64]);
    let b = routes::POST_CHANNEL_MESSAGES.compile(&[&2u64]);
    assert_eq!(a.route_key, b.route_key);
    assert_ne!(a.major, b.major);
}

#[test]
fn test_url_joins_base_without_doubling_slashes() {
    let compiled = routes::GET_CHANNEL.compile(&[&42u64]);
    assert_eq!(
        compiled.url("https://discord.com/api/v10/"),
        "https://discord.com/api/v10/channels/42"
    );
    assert_eq!(
        compiled.url("https://discord.com/api/v10"),
        "https://discord.com/api/v10/channels/42"
    );
}

#[test]
fn test_string_params_render_verbatim() {
    let route = Route::new(Method::Get, "/invites/{invite_code}");
    let compiled = route.compile(&[&"abc123"]);
    assert_eq!(compiled.path, "/invites/abc123");
    assert_eq!(compiled.major, "abc123");
}

#[test]
fn test_compiled_route_display_shows_rendered_path() {
    let compiled: CompiledRoute = routes::GET_CHANNEL.compile(&[&42u64]);
    assert_eq!(format!("{compiled}"), "GET /channels/42");
}
