//! SeaORM entities mapping to the database tables.

pub mod idea;
pub mod idea_group;
pub mod user;
pub mod user_setting;

pub mod prelude {
    pub use super::idea::Entity as Idea;
    pub use super::idea::Model as IdeaModel;
    pub use super::idea::ActiveModel as IdeaActiveModel;
    pub use super::idea::Column as IdeaColumn;

    pub use super::idea_group::Entity as IdeaGroup;
    pub use super::idea_group::Model as IdeaGroupModel;
    pub use super::idea_group::ActiveModel as IdeaGroupActiveModel;
    pub use super::idea_group::Column as IdeaGroupColumn;

    pub use super::user::Entity as User;
    pub use super::user::Model as UserModel;
    pub use super::user::ActiveModel as UserActiveModel;
    pub use super::user::Column as UserColumn;

    pub use super::user_setting::Entity as UserSetting;
    pub use super::user_setting::Model as UserSettingModel;
    pub use super::user_setting::ActiveModel as UserSettingActiveModel;
    pub use super::user_setting::Column as UserSettingColumn;
}
