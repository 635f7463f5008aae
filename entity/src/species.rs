use sea_orm::entity::prelude::*;

/// A species from the external catalog.
///
/// `homeworld_id` is a non-cascading reference: a planet with dependent
/// species cannot be deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: Option<String>,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub average_lifespan: Option<String>,
    pub language: Option<String>,
    pub homeworld_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Planet,
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
