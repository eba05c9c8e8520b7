use super::*;

fn config() -> TagConfig {
    TagConfig::default()
}

#[test]
fn splits_uniform_and_targeted_keys() {
    let scope = TagScope::parse(r#"default:"offline" "status->default":"online""#);

    assert_eq!(scope.uniform(), &[("default".to_string(), "offline".to_string())]);
    assert_eq!(
        scope.targeted(),
        &[TargetedOverride {
            target: "status".to_string(),
            key: "default".to_string(),
            value: "online".to_string(),
        }]
    );
}

#[test]
fn arrow_without_both_sides_is_uniform() {
    let scope = TagScope::parse(r#""->default":"a" "status->":"b" "plain":"c""#);

    assert!(scope.targeted().is_empty());
    assert_eq!(scope.uniform().len(), 3);
}

#[test]
fn no_scopes_keeps_declared_value() {
    let base = FieldInfo::parse("Status", r#"default:"init""#);
    let merged = merge(&base, &Vec::<TagScope>::new(), &config());

    assert_eq!(merged, base);
}

#[test]
fn uniform_override_replaces_and_adds_keys() {
    let base = FieldInfo::parse("Name", r#"json:"name" update:"user""#);
    let scope = TagScope::parse(r#"update:"admin" create:"required" default:"emily""#);
    let merged = merge(&base, [&scope], &config());

    let want: TagMap = [
        ("json", "name"),
        ("update", "admin"),
        ("create", "required"),
        ("default", "emily"),
    ]
    .into_iter()
    .collect();
    assert_eq!(merged.tags, want);
    assert_eq!(merged.name, "name");
}

#[test]
fn outer_scope_has_final_say() {
    let base = FieldInfo::parse("Name", r#"json:"name" update:"user""#);
    let inner = TagScope::parse(r#"update:"admin" create:"required" default:"emily""#);
    let outer = TagScope::parse(r#"create:"optional" default:"""#);
    let merged = merge(&base, [&inner, &outer], &config());

    let want: TagMap = [
        ("json", "name"),
        ("update", "admin"),
        ("create", "optional"),
        ("default", ""),
    ]
    .into_iter()
    .collect();
    assert_eq!(merged.tags, want);
}

#[test]
fn targeted_override_hits_only_the_named_field() {
    let scope = TagScope::parse(r#""status->default":"online""#);

    let status = merge(&FieldInfo::parse("Status", r#"default:"offline""#), [&scope], &config());
    let enabled = merge(&FieldInfo::parse("Enabled", r#"default:"offline""#), [&scope], &config());

    assert_eq!(status.tags.get("default"), Some("online"));
    assert_eq!(enabled.tags.get("default"), Some("offline"));
}

#[test]
fn targeted_beats_uniform_in_the_same_scope() {
    let scope = TagScope::parse(r#"default:"offline" "status->default":"online""#);
    let merged = merge(&FieldInfo::parse("Status", r#"default:"init""#), [&scope], &config());

    assert_eq!(merged.tags.get("default"), Some("online"));
}

#[test]
fn outer_uniform_beats_inner_targeted() {
    let inner = TagScope::parse(r#""status->default":"online""#);
    let outer = TagScope::parse(r#"default:"offline""#);
    let merged = merge(&FieldInfo::parse("Status", ""), [&inner, &outer], &config());

    assert_eq!(merged.tags.get("default"), Some("offline"));
}

#[test]
fn targeted_override_matches_ignored_fields_by_default_name() {
    let scope = TagScope::parse(r#""secret->name":"token""#);
    let merged = merge(&FieldInfo::parse("Secret", r#"json:"-""#), [&scope], &config());

    assert!(!merged.ignore);
    assert_eq!(merged.name, "token");
}

#[test]
fn explicit_name_from_a_scope_renames_the_field() {
    let scope = TagScope::parse(r#""status->name":"state""#);
    let merged = merge(&FieldInfo::parse("Status", ""), [&scope], &config());

    assert_eq!(merged.name, "state");
    assert_eq!(merged.field_name, "Status");
}

#[test]
fn base_descriptor_is_not_mutated() {
    let base = FieldInfo::parse("Status", r#"default:"init""#);
    let scope = TagScope::parse(r#"default:"offline""#);
    let _ = merge(&base, [&scope], &config());

    assert_eq!(base.tags.get("default"), Some("init"));
}
