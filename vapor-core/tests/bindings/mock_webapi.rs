// @generated by vapor. Do not edit by hand.
//
// Typed wrappers over `vapor_core::client::VaporClient`, one per Web API method.

/// Methods of the `ICheatReportingService` interface.
#[allow(non_camel_case_types)]
pub struct ICheatReportingService<'a, T> {
    client: &'a vapor_core::client::VaporClient<T>,
}

impl<'a, T: vapor_core::http::Transport> ICheatReportingService<'a, T> {
    pub fn new(client: &'a vapor_core::client::VaporClient<T>) -> Self {
        Self { client }
    }

    /// `POST ICheatReportingService/ReportPlayerCheating/v1/`
    #[allow(non_snake_case)]
    pub async fn report_player_cheating_v1(
        &self,
        params: ICheatReportingServiceReportPlayerCheatingV1Params,
    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {
        self.client
            .call("ICheatReportingService", "ReportPlayerCheating_v1", params.into())
            .await
    }
}

/// Parameters of `ICheatReportingService.ReportPlayerCheating_v1`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(non_camel_case_types, non_snake_case)]
pub struct ICheatReportingServiceReportPlayerCheatingV1Params {
    /// steamid of the user running and reporting the cheat.
    pub steamid: u64,
    /// The appid.
    pub appid: u32,
    /// true if the report is from a heuristic.
    pub heuristic: Option<bool>,
}

impl From<ICheatReportingServiceReportPlayerCheatingV1Params> for vapor_core::client::Params {
    fn from(p: ICheatReportingServiceReportPlayerCheatingV1Params) -> Self {
        let mut params = vapor_core::client::Params::new();
        params.insert("steamid", p.steamid);
        params.insert("appid", p.appid);
        params.insert_opt("heuristic", p.heuristic);
        params
    }
}

/// Methods of the `IMockBroken` interface.
#[allow(non_camel_case_types)]
pub struct IMockBroken<'a, T> {
    client: &'a vapor_core::client::VaporClient<T>,
}

impl<'a, T: vapor_core::http::Transport> IMockBroken<'a, T> {
    pub fn new(client: &'a vapor_core::client::VaporClient<T>) -> Self {
        Self { client }
    }

    /// `GET IMockBroken/Fetch/v1/`
    #[allow(non_snake_case)]
    pub async fn fetch_v1(
        &self,
        params: IMockBrokenFetchV1Params,
    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {
        self.client
            .call("IMockBroken", "Fetch_v1", params.into())
            .await
    }
}

/// Parameters of `IMockBroken.Fetch_v1`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(non_camel_case_types, non_snake_case)]
pub struct IMockBrokenFetchV1Params {
}

impl From<IMockBrokenFetchV1Params> for vapor_core::client::Params {
    fn from(_: IMockBrokenFetchV1Params) -> Self {
        vapor_core::client::Params::new()
    }
}

/// Methods of the `ISteamNews` interface.
#[allow(non_camel_case_types)]
pub struct ISteamNews<'a, T> {
    client: &'a vapor_core::client::VaporClient<T>,
}

impl<'a, T: vapor_core::http::Transport> ISteamNews<'a, T> {
    pub fn new(client: &'a vapor_core::client::VaporClient<T>) -> Self {
        Self { client }
    }

    /// `GET ISteamNews/GetNewsForApp/v2/`
    #[allow(non_snake_case)]
    pub async fn get_news_for_app_v2(
        &self,
        params: ISteamNewsGetNewsForAppV2Params,
    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {
        self.client
            .call("ISteamNews", "GetNewsForApp_v2", params.into())
            .await
    }
}

/// Parameters of `ISteamNews.GetNewsForApp_v2`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(non_camel_case_types, non_snake_case)]
pub struct ISteamNewsGetNewsForAppV2Params {
    /// AppID to retrieve news for
    pub appid: u32,
    /// # of posts to retrieve (default 20)
    pub count: u32,
    /// Maximum length for the content to return
    pub maxlength: Option<u32>,
}

impl From<ISteamNewsGetNewsForAppV2Params> for vapor_core::client::Params {
    fn from(p: ISteamNewsGetNewsForAppV2Params) -> Self {
        let mut params = vapor_core::client::Params::new();
        params.insert("appid", p.appid);
        params.insert("count", p.count);
        params.insert_opt("maxlength", p.maxlength);
        params
    }
}

/// Methods of the `ISteamWebAPIUtil` interface.
#[allow(non_camel_case_types)]
pub struct ISteamWebAPIUtil<'a, T> {
    client: &'a vapor_core::client::VaporClient<T>,
}

impl<'a, T: vapor_core::http::Transport> ISteamWebAPIUtil<'a, T> {
    pub fn new(client: &'a vapor_core::client::VaporClient<T>) -> Self {
        Self { client }
    }

    /// `GET ISteamWebAPIUtil/GetServerInfo/v1/`
    #[allow(non_snake_case)]
    pub async fn get_server_info_v1(
        &self,
        params: ISteamWebAPIUtilGetServerInfoV1Params,
    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {
        self.client
            .call("ISteamWebAPIUtil", "GetServerInfo_v1", params.into())
            .await
    }

    /// `GET ISteamWebAPIUtil/GetSupportedAPIList/v1/`
    #[allow(non_snake_case)]
    pub async fn get_supported_api_list_v1(
        &self,
        params: ISteamWebAPIUtilGetSupportedAPIListV1Params,
    ) -> Result<vapor_core::serde_json::Value, vapor_core::client::CallError> {
        self.client
            .call("ISteamWebAPIUtil", "GetSupportedAPIList_v1", params.into())
            .await
    }
}

/// Parameters of `ISteamWebAPIUtil.GetServerInfo_v1`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(non_camel_case_types, non_snake_case)]
pub struct ISteamWebAPIUtilGetServerInfoV1Params {
}

impl From<ISteamWebAPIUtilGetServerInfoV1Params> for vapor_core::client::Params {
    fn from(_: ISteamWebAPIUtilGetServerInfoV1Params) -> Self {
        vapor_core::client::Params::new()
    }
}

/// Parameters of `ISteamWebAPIUtil.GetSupportedAPIList_v1`.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(non_camel_case_types, non_snake_case)]
pub struct ISteamWebAPIUtilGetSupportedAPIListV1Params {
}

impl From<ISteamWebAPIUtilGetSupportedAPIListV1Params> for vapor_core::client::Params {
    fn from(_: ISteamWebAPIUtilGetSupportedAPIListV1Params) -> Self {
        vapor_core::client::Params::new()
    }
}
