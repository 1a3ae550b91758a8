use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::loans::domain::LoanService;
use crate::loans::domain::service::LoanServiceImpl;

pub(crate) fn create_loan_service(config: &Configuration, library: SharedLibrary, via: GatewayPublisherVia) -> Box<dyn LoanService> {
    let publisher = create_publisher(via);
    Box::new(LoanServiceImpl::new(config, library, publisher))
}
