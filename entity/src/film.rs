use sea_orm::entity::prelude::*;

/// A film from the external catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "films")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: Option<String>,
    pub title: String,
    pub episode_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<Date>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_character::Entity")]
    FilmCharacter,
}

impl Related<super::film_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
