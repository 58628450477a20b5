use log::error;

pub(crate) fn report_error<A, S: AsRef<str>>(message: S) -> anyhow::Result<A> {
    error!("{}", message.as_ref());
    Err(anyhow::anyhow!("{}", message.as_ref()))
}
