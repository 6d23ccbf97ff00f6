use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;

use crate::pipeline::VerificationResponse;

/// Surface JSON-RPC: trois méthodes unaires, même forme de requête et de
/// réponse. Les échecs de vérification sont des réponses, jamais des erreurs
/// RPC.
#[rpc(server, client)]
pub trait MailVerifierApi {
    #[method(name = "SyntaxVerification")]
    async fn syntax_verification(&self, email: String) -> RpcResult<VerificationResponse>;

    #[method(name = "SimpleVerification")]
    async fn simple_verification(&self, email: String) -> RpcResult<VerificationResponse>;

    #[method(name = "FullVerification")]
    async fn full_verification(&self, email: String) -> RpcResult<VerificationResponse>;
}
