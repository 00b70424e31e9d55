// idcard/src/place/data.rs

//! Bundled administrative division names (GB/T 2260).
//!
//! Province-level prefixes are complete. City/county codes are a selection;
//! load a full table through `PlaceTable` when every county matters.

pub(super) static PROVINCES: &[(&str, &str)] = &[
    ("11", "北京"),
    ("12", "天津"),
    ("13", "河北"),
    ("14", "山西"),
    ("15", "内蒙古"),
    ("21", "辽宁"),
    ("22", "吉林"),
    ("23", "黑龙江"),
    ("31", "上海"),
    ("32", "江苏"),
    ("33", "浙江"),
    ("34", "安徽"),
    ("35", "福建"),
    ("36", "江西"),
    ("37", "山东"),
    ("41", "河南"),
    ("42", "湖北"),
    ("43", "湖南"),
    ("44", "广东"),
    ("45", "广西"),
    ("46", "海南"),
    ("50", "重庆"),
    ("51", "四川"),
    ("52", "贵州"),
    ("53", "云南"),
    ("54", "西藏"),
    ("61", "陕西"),
    ("62", "甘肃"),
    ("63", "青海"),
    ("64", "宁夏"),
    ("65", "新疆"),
    ("71", "台湾"),
    ("81", "香港"),
    ("82", "澳门"),
];

pub(super) static CITIES: &[(&str, &str)] = &[
    // 北京
    ("110101", "东城区"),
    ("110102", "西城区"),
    ("110103", "崇文区"),
    ("110104", "宣武区"),
    ("110105", "朝阳区"),
    ("110106", "丰台区"),
    ("110107", "石景山区"),
    ("110108", "海淀区"),
    ("110109", "门头沟区"),
    ("110111", "房山区"),
    ("110112", "通州区"),
    ("110113", "顺义区"),
    ("110114", "昌平区"),
    ("110115", "大兴区"),
    ("110116", "怀柔区"),
    ("110117", "平谷区"),
    ("110228", "密云县"),
    ("110229", "延庆县"),
    // 天津
    ("120101", "和平区"),
    ("120102", "河东区"),
    ("120103", "河西区"),
    ("120104", "南开区"),
    ("120105", "河北区"),
    ("120106", "红桥区"),
    // 河北
    ("130100", "石家庄市"),
    ("130102", "长安区"),
    ("130200", "唐山市"),
    ("130300", "秦皇岛市"),
    ("130400", "邯郸市"),
    ("130402", "邯山区"),
    ("130403", "丛台区"),
    ("130404", "复兴区"),
    ("130421", "邯郸县"),
    ("130500", "邢台市"),
    ("130600", "保定市"),
    ("130700", "张家口市"),
    ("130800", "承德市"),
    ("130900", "沧州市"),
    ("131000", "廊坊市"),
    ("131100", "衡水市"),
    // 山西
    ("140100", "太原市"),
    ("140200", "大同市"),
    // 内蒙古
    ("150100", "呼和浩特市"),
    ("150200", "包头市"),
    // 辽宁
    ("210100", "沈阳市"),
    ("210200", "大连市"),
    ("210300", "鞍山市"),
    // 吉林
    ("220100", "长春市"),
    ("220102", "南关区"),
    ("220103", "宽城区"),
    ("220104", "朝阳区"),
    ("220105", "二道区"),
    ("220106", "绿园区"),
    ("220200", "吉林市"),
    ("220300", "四平市"),
    ("220381", "公主岭市"),
    ("220382", "双辽市"),
    ("220400", "辽源市"),
    ("220500", "通化市"),
    ("220600", "白山市"),
    ("220700", "松原市"),
    ("220800", "白城市"),
    ("222400", "延边朝鲜族自治州"),
    // 黑龙江
    ("230100", "哈尔滨市"),
    ("230200", "齐齐哈尔市"),
    // 上海
    ("310101", "黄浦区"),
    ("310104", "徐汇区"),
    ("310105", "长宁区"),
    ("310106", "静安区"),
    ("310107", "普陀区"),
    ("310109", "虹口区"),
    ("310110", "杨浦区"),
    ("310115", "浦东新区"),
    // 江苏
    ("320100", "南京市"),
    ("320200", "无锡市"),
    ("320500", "苏州市"),
    // 浙江
    ("330100", "杭州市"),
    ("330200", "宁波市"),
    // 安徽
    ("340100", "合肥市"),
    // 福建
    ("350100", "福州市"),
    ("350200", "厦门市"),
    // 江西
    ("360100", "南昌市"),
    // 山东
    ("370100", "济南市"),
    ("370200", "青岛市"),
    // 河南
    ("410100", "郑州市"),
    // 湖北
    ("420100", "武汉市"),
    // 湖南
    ("430100", "长沙市"),
    // 广东
    ("440100", "广州市"),
    ("440300", "深圳市"),
    // 广西
    ("450100", "南宁市"),
    // 海南
    ("460100", "海口市"),
    // 重庆
    ("500101", "万州区"),
    ("500103", "渝中区"),
    // 四川
    ("510100", "成都市"),
    // 贵州
    ("520100", "贵阳市"),
    // 云南
    ("530100", "昆明市"),
    // 西藏
    ("540100", "拉萨市"),
    // 陕西
    ("610100", "西安市"),
    // 甘肃
    ("620100", "兰州市"),
    // 青海
    ("630100", "西宁市"),
    // 宁夏
    ("640100", "银川市"),
    // 新疆
    ("650100", "乌鲁木齐市"),
];
