use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::readers::domain::ReaderService;
use crate::readers::domain::service::ReaderServiceImpl;

pub(crate) fn create_reader_service(config: &Configuration, library: SharedLibrary, via: GatewayPublisherVia) -> Box<dyn ReaderService> {
    let publisher = create_publisher(via);
    Box::new(ReaderServiceImpl::new(config, library, publisher))
}
