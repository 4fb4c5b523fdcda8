use crate::gui::screens::{
    ScreenData, ScreenMessage, dashboard::DashboardScreen, login::LoginScreen, map::MapScreen,
    profile::ProfileScreen, register::RegisterScreen, settings::SettingsScreen, stats::StatsScreen,
};
use crate::session::ViewId;

#[derive(Debug, Clone)]
pub enum Message {
    Login(ScreenMessage<LoginScreen>),
    Register(ScreenMessage<RegisterScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    Map(ScreenMessage<MapScreen>),
    Stats(ScreenMessage<StatsScreen>),
    Profile(ScreenMessage<ProfileScreen>),
    Settings(ScreenMessage<SettingsScreen>),
    ChangeScreen(ScreenData),
    Navigate(ViewId),
    Logout,
    DismissNotice,
}
