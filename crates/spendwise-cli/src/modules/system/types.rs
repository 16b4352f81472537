use spendwise_client::ApiClient;

pub struct CommandContext<'a> {
    pub client: &'a ApiClient,
    pub json: bool,
}
