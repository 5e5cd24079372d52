//! Read-only table of every REST operation the crate can call.

use super::{
	Endpoint,
	Host::{Official, Open, Work},
	Method::{Get, Post, Upload},
};

macro_rules! endpoints {
	($($(#[$meta:meta])* $name:ident => $method:ident $host:ident $template:literal;)+) => {
		$(
			$(#[$meta])*
			pub const $name: Endpoint = Endpoint::new(stringify!($name), $method, $host, $template);
		)+

		/// Every endpoint in the table.
		pub const ALL: &[Endpoint] = &[$($name),+];
	};
}

endpoints! {
	/// WeCom access token (`corpid`, `corpsecret`).
	QY_GET_TOKEN => Get Work "/cgi-bin/gettoken?corpid=%s&corpsecret=%s";
	/// Official-account access token (`appid`, `secret`).
	MP_GET_TOKEN => Get Official "/cgi-bin/token?grant_type=client_credential&appid=%s&secret=%s";
	/// WeCom corp-level JS-SDK ticket.
	QY_CORP_JSAPI_TICKET => Get Work "/cgi-bin/get_jsapi_ticket?access_token=%s";
	/// WeCom agent-level JS-SDK ticket.
	QY_AGENT_JSAPI_TICKET => Get Work "/cgi-bin/ticket/get?access_token=%s&type=agent_config";

	/// Agent details.
	QY_AGENT_GET => Get Work "/cgi-bin/agent/get?access_token=%s&agentid=%s";
	/// Agents visible to the access token.
	QY_AGENT_LIST => Get Work "/cgi-bin/agent/list?access_token=%s";
	/// Agent settings update.
	QY_AGENT_SET => Post Work "/cgi-bin/agent/set?access_token=%s";
	/// Agent menu creation.
	QY_MENU_CREATE => Post Work "/cgi-bin/menu/create?access_token=%s&agentid=%s";
	/// Agent menu lookup.
	QY_MENU_GET => Get Work "/cgi-bin/menu/get?access_token=%s&agentid=%s";
	/// Agent menu removal.
	QY_MENU_DELETE => Get Work "/cgi-bin/menu/delete?access_token=%s&agentid=%s";

	/// Department creation.
	QY_DEPARTMENT_CREATE => Post Work "/cgi-bin/department/create?access_token=%s";
	/// Department update.
	QY_DEPARTMENT_UPDATE => Post Work "/cgi-bin/department/update?access_token=%s";
	/// Department removal.
	QY_DEPARTMENT_DELETE => Get Work "/cgi-bin/department/delete?access_token=%s&id=%s";
	/// Department subtree listing.
	QY_DEPARTMENT_LIST => Get Work "/cgi-bin/department/list?access_token=%s&id=%s";

	/// Temporary media upload.
	QY_MEDIA_UPLOAD => Upload Work "/cgi-bin/media/upload?access_token=%s&type=%s";
	/// Permanent image upload for message bodies.
	QY_MEDIA_UPLOAD_IMAGE => Upload Work "/cgi-bin/media/uploadimg?access_token=%s";
	/// Temporary media download.
	QY_MEDIA_GET => Get Work "/cgi-bin/media/get?access_token=%s&media_id=%s";
	/// High-definition voice download for JS-SDK recordings.
	QY_MEDIA_GET_JSSDK => Get Work "/cgi-bin/media/get/jssdk?access_token=%s&media_id=%s";

	/// Application message delivery.
	QY_MESSAGE_SEND => Post Work "/cgi-bin/message/send?access_token=%s";
	/// Application message statistics.
	QY_MESSAGE_STATISTICS => Post Work "/cgi-bin/message/get_statistics?access_token=%s";
	/// Task card status update.
	QY_MESSAGE_UPDATE_TASK_CARD => Post Work "/cgi-bin/message/update_taskcard?access_token=%s";

	/// Group chat creation.
	QY_APPCHAT_CREATE => Post Work "/cgi-bin/appchat/create?access_token=%s";
	/// Group chat update.
	QY_APPCHAT_UPDATE => Post Work "/cgi-bin/appchat/update?access_token=%s";
	/// Group chat lookup.
	QY_APPCHAT_GET => Get Work "/cgi-bin/appchat/get?access_token=%s&chatid=%s";
	/// Group chat message delivery.
	QY_APPCHAT_SEND => Post Work "/cgi-bin/appchat/send?access_token=%s";
	/// Linked-corp message delivery.
	QY_LINKEDCORP_MESSAGE_SEND => Post Work "/cgi-bin/linkedcorp/message/send?access_token=%s";

	/// WeCom API egress IP ranges.
	QY_API_DOMAIN_IP => Get Work "/cgi-bin/get_api_domain_ip?access_token=%s";

	/// Callback server IP ranges.
	MP_CALLBACK_IP => Get Official "/cgi-bin/getcallbackip?access_token=%s";
	/// Callback network check.
	MP_CALLBACK_CHECK => Post Official "/cgi-bin/callback/check?access_token=%s";
	/// Long-to-short URL conversion.
	MP_SHORT_URL => Post Official "/cgi-bin/shorturl?access_token=%s";
	/// Semantic query.
	MP_SEMANTIC_SEARCH => Post Official "/semantic/semproxy/search?access_token=%s";
	/// Current auto-reply rules.
	MP_AUTO_REPLY_INFO => Get Official "/cgi-bin/get_current_autoreply_info?access_token=%s";

	/// Customer-service account creation.
	MP_KF_ACCOUNT_ADD => Post Official "/customservice/kfaccount/add?access_token=%s";
	/// Customer-service account update.
	MP_KF_ACCOUNT_UPDATE => Post Official "/customservice/kfaccount/update?access_token=%s";
	/// Customer-service account removal.
	MP_KF_ACCOUNT_DELETE => Get Official "/customservice/kfaccount/del?access_token=%s&kf_account=%s";
	/// Customer-service avatar upload.
	MP_KF_ACCOUNT_UPLOAD_HEAD_IMAGE => Upload Official "/customservice/kfaccount/uploadheadimg?access_token=%s&kf_account=%s";
	/// Customer-service worker invitation.
	MP_KF_ACCOUNT_INVITE_WORKER => Post Official "/customservice/kfaccount/inviteworker?access_token=%s";
	/// Customer-service account listing.
	MP_KF_LIST => Get Official "/cgi-bin/customservice/getkflist?access_token=%s";
	/// Online customer-service account listing.
	MP_KF_ONLINE_LIST => Get Official "/cgi-bin/customservice/getonlinekflist?access_token=%s";
	/// Customer-service message delivery.
	MP_CUSTOM_MESSAGE_SEND => Post Official "/cgi-bin/message/custom/send?access_token=%s";
	/// Customer-service typing indicator.
	MP_CUSTOM_TYPING => Post Official "/cgi-bin/message/custom/typing?access_token=%s";

	/// Web authorization page (`appid`, `redirect_uri`, `scope`).
	MP_SNS_AUTHORIZE => Get Open "/connect/oauth2/authorize?appid=%s&redirect_uri=%s&response_type=code&scope=%s";
	/// Web authorization code exchange.
	MP_SNS_ACCESS_TOKEN => Get Official "/sns/oauth2/access_token?appid=%s&secret=%s&code=%s&grant_type=authorization_code";
	/// Web authorization token refresh.
	MP_SNS_REFRESH_TOKEN => Get Official "/sns/oauth2/refresh_token?appid=%s&grant_type=refresh_token&refresh_token=%s";
	/// Web authorization token check.
	MP_SNS_CHECK => Get Official "/sns/auth?access_token=%s&openid=%s";
	/// Web authorization user profile.
	MP_SNS_USER_INFO => Get Official "/sns/userinfo?access_token=%s&openid=%s&lang=%s";

	/// Shake-around enrollment.
	MP_SHAKE_ACCOUNT_REGISTER => Post Official "/shakearound/account/register?access_token=%s";
	/// Shake-around enrollment audit status.
	MP_SHAKE_ACCOUNT_AUDIT_STATUS => Get Official "/shakearound/account/auditstatus?access_token=%s";
	/// Shake-around image material upload.
	MP_SHAKE_MATERIAL_ADD => Upload Official "/shakearound/material/add?access_token=%s";
	/// Device id application.
	MP_SHAKE_DEVICE_APPLY_ID => Post Official "/shakearound/device/applyid?access_token=%s";
	/// Device id application status.
	MP_SHAKE_DEVICE_APPLY_STATUS => Post Official "/shakearound/device/applystatus?access_token=%s";
	/// Device comment update.
	MP_SHAKE_DEVICE_UPDATE => Post Official "/shakearound/device/update?access_token=%s";
	/// Device to store binding.
	MP_SHAKE_DEVICE_BIND_LOCATION => Post Official "/shakearound/device/bindlocation?access_token=%s";
	/// Device search.
	MP_SHAKE_DEVICE_SEARCH => Post Official "/shakearound/device/search?access_token=%s";
	/// Device to page binding.
	MP_SHAKE_DEVICE_BIND_PAGE => Post Official "/shakearound/device/bindpage?access_token=%s";
	/// Device and page relation search.
	MP_SHAKE_RELATION_SEARCH => Post Official "/shakearound/relation/search?access_token=%s";
	/// Device group creation.
	MP_SHAKE_GROUP_ADD => Post Official "/shakearound/device/group/add?access_token=%s";
	/// Device group rename.
	MP_SHAKE_GROUP_UPDATE => Post Official "/shakearound/device/group/update?access_token=%s";
	/// Device group removal.
	MP_SHAKE_GROUP_DELETE => Post Official "/shakearound/device/group/delete?access_token=%s";
	/// Device group listing.
	MP_SHAKE_GROUP_LIST => Post Official "/shakearound/device/group/getlist?access_token=%s";
	/// Device group details.
	MP_SHAKE_GROUP_DETAIL => Post Official "/shakearound/device/group/getdetail?access_token=%s";
	/// Devices added to a group.
	MP_SHAKE_GROUP_ADD_DEVICE => Post Official "/shakearound/device/group/adddevice?access_token=%s";
	/// Devices removed from a group.
	MP_SHAKE_GROUP_DELETE_DEVICE => Post Official "/shakearound/device/group/deletedevice?access_token=%s";
	/// Page creation.
	MP_SHAKE_PAGE_ADD => Post Official "/shakearound/page/add?access_token=%s";
	/// Page update.
	MP_SHAKE_PAGE_UPDATE => Post Official "/shakearound/page/update?access_token=%s";
	/// Page search.
	MP_SHAKE_PAGE_SEARCH => Post Official "/shakearound/page/search?access_token=%s";
	/// Page removal.
	MP_SHAKE_PAGE_DELETE => Post Official "/shakearound/page/delete?access_token=%s";
	/// Shake event device and user lookup.
	MP_SHAKE_USER_INFO => Post Official "/shakearound/user/getshakeinfo?access_token=%s";
}
