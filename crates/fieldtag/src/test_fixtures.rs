//! Shared record shapes for unit tests.

use crate::{
    Record,
    model::{FieldKind, FieldModel, RecordModel},
};

// Compound override chain: init -> offline -> targeted online.

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct StatusBase {
    #[tag = r#"default:"init""#]
    pub status: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct EnabledBase {
    #[tag = r#"default:"false""#]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Compound {
    #[embed]
    #[tag = r#"default:"offline""#]
    pub status_base: StatusBase,
    #[embed]
    pub enabled_base: EnabledBase,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Service {
    #[embed]
    #[tag = r#""status->default":"online" "enabled->default":"true""#]
    pub compound: Compound,
}

// Diamond: two siblings embed the same record.

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Named {
    #[tag = r#"json:"name" update:"user""#]
    pub name: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Left {
    #[embed]
    #[tag = r#"update:"admin" create:"required" default:"emily""#]
    pub named: Named,
    #[tag = r#"json:"prop1""#]
    pub prop1: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Right {
    #[embed]
    #[tag = r#"update:"domain" create:"optional""#]
    pub named: Named,
    #[tag = r#"json:"prop2""#]
    pub prop2: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Diamond {
    #[embed]
    pub left: Left,
    #[embed]
    pub right: Right,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Account {
    #[embed]
    #[tag = r#"create:"optional" default:"""#]
    pub left: Left,
    #[ident = "DBInstanceId"]
    pub db_instance_id: u64,
    #[tag = r#"json:"-""#]
    pub secret: String,
    #[embed]
    #[tag = r#"json:"-""#]
    pub audit: StatusBase,
}

// Embedding sites that rename or hide a whole sub-record.

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Meta {
    pub created: u64,
    pub owner: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Host {
    #[embed]
    #[tag = r#"name:"meta" json:"-""#]
    pub meta: Meta,
    pub id: u64,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Renamed {
    #[embed]
    #[tag = r#"json:"x""#]
    pub meta: Meta,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Inner {
    #[embed]
    pub meta: Meta,
    pub note: String,
}

#[derive(Clone, Debug, Default, Record)]
pub(crate) struct Outer {
    #[embed]
    #[tag = r#""meta->json":"-""#]
    pub inner: Inner,
    pub id: u64,
}

// Hand-built model that embeds itself.
pub(crate) static SELF_EMBEDDING: RecordModel = RecordModel {
    path: "test_fixtures::SelfEmbedding",
    fields: &[FieldModel {
        ident: "Again",
        tag: "",
        kind: FieldKind::Embedded(&SELF_EMBEDDING),
    }],
};
